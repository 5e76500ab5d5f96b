/*!
# Introductory Tutorial

Run the executable without arguments to get the interactive editor.
Type CTRL-D to exit.
<pre><code>&nbsp;  ZX BASIC
&nbsp;> █
</code></pre>

Lines that begin with a number are program lines. Each one is stored in
a listing and the whole listing is tokenized into a 64K memory image
laid out the way a 48K ZX Spectrum keeps it, starting at address 23755.

<pre><code>&nbsp;> 10 print "HELLO"
&nbsp;> 20 go to 10
&nbsp;> LIST
&nbsp;  10 PRINT "HELLO"
&nbsp;  20 GO TO 10
</code></pre>

`LIST` does not show what you typed. It reads the program back out of
memory and expands every token, so you see the program as the Spectrum
would list it. Keywords may be typed in any case.

Type a line number on its own to delete that line. Other commands:

 * `LIST n` lists from line `n` onwards.
 * `VARS` shows the variables area and any `DEF FN` definitions.
 * `DUMP` shows the program area in hexadecimal.
 * `RENUM`, `RENUM 100` or `RENUM 100,5` renumbers the program and the
   line numbers after `GO TO`, `GO SUB`, `RESTORE` and `RUN`.
 * `POKE address,value` writes one byte of memory.
 * `NEW` clears the program and memory.
 * `LOAD "file"` and `SAVE "file"` read and write text files.

Tab after a line number brings that line back for editing.

The same codec is available from the command line:

```text
zxbasic tokenize prog.bas -o prog.bin
zxbasic list prog.bin
zxbasic vars vars.bin
zxbasic renum prog.bas --start 100 --step 10
```

*/
